use std::collections::HashMap;

pub const CLASSPATH_EXCEPTION: &str = "Classpath-exception-2.0";

const GPL_PREFIX: &str = "GPL";

/// How the Classpath exception of a single file was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClasspathOutcome {
    /// The file does not mention the exception
    NotPresent,
    /// The only GPL license of the file absorbed the exception
    Merged { gpl_key: String },
    /// Exception found, but no GPL license to attach it to
    GplAbsent,
    /// Exception found together with several GPL licenses
    GplAmbiguous { gpl_keys: Vec<String> },
}

/// Per-file mapping of detected SPDX keys to the SPDX ids to emit
///
/// A key without entry must not be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpdxRewrite {
    effective: HashMap<String, String>,
    outcome: ClasspathOutcome,
}

impl SpdxRewrite {
    pub fn effective_id(&self, spdx_key: &str) -> Option<&str> {
        self.effective.get(spdx_key).map(String::as_str)
    }

    pub fn outcome(&self) -> &ClasspathOutcome {
        &self.outcome
    }
}

/// ClasspathExceptionPolicy merges `Classpath-exception-2.0` into the GPL
/// license it belongs to.
///
/// Rules, evaluated per file:
/// 1. exactly one distinct `GPL*` key: it becomes `<key> WITH Classpath-exception-2.0`
/// 2. zero or several `GPL*` keys: all keys stay unchanged, the outcome is a warning
/// 3. `Classpath-exception-2.0` itself is never emitted as a separate license
pub struct ClasspathExceptionPolicy;

impl ClasspathExceptionPolicy {
    pub fn resolve<'a>(spdx_keys: impl IntoIterator<Item = &'a str>) -> SpdxRewrite {
        let mut effective = HashMap::new();
        let mut gpl_keys = Vec::new();
        let mut exception_present = false;

        for key in spdx_keys {
            if key == CLASSPATH_EXCEPTION {
                exception_present = true;
                continue;
            }
            if effective.insert(key.to_string(), key.to_string()).is_none()
                && key.starts_with(GPL_PREFIX)
            {
                gpl_keys.push(key.to_string());
            }
        }

        let outcome = if !exception_present {
            ClasspathOutcome::NotPresent
        } else {
            match gpl_keys.len() {
                0 => ClasspathOutcome::GplAbsent,
                1 => {
                    let gpl_key = gpl_keys.remove(0);
                    effective.insert(
                        gpl_key.clone(),
                        format!("{} WITH {}", gpl_key, CLASSPATH_EXCEPTION),
                    );
                    ClasspathOutcome::Merged { gpl_key }
                }
                _ => ClasspathOutcome::GplAmbiguous { gpl_keys },
            }
        };

        SpdxRewrite { effective, outcome }
    }
}
