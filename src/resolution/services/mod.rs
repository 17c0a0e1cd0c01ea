mod component_info_assembler;
mod curation_overlay;
mod metadata_generator;
mod scan_mapper;

pub use component_info_assembler::ComponentInfoAssembler;
pub use curation_overlay::{CurationOverlay, CURATED_LICENSE_SCORE};
pub use metadata_generator::MetadataGenerator;
pub use scan_mapper::{
    license_reference, MappingThresholds, ScanMapper, DEFAULT_LICENSE_TO_TEXT_RATIO_THRESHOLD,
    DEFAULT_MIN_LICENSE_SCORE,
};
