mod classpath_exception;
mod url_normalization;

pub use classpath_exception::{
    ClasspathExceptionPolicy, ClasspathOutcome, SpdxRewrite, CLASSPATH_EXCEPTION,
};
pub use url_normalization::{ContentPathResolver, UrlNormalization};
