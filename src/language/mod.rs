mod registry;

pub use registry::{ExtensionRegistry, resolve};
