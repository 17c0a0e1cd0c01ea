/// Use cases module containing application business logic orchestration
mod resolve_component_info;

pub use resolve_component_info::ResolveComponentInfoUseCase;
