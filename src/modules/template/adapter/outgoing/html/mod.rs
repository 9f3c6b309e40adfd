mod creative;
mod minimal;
mod modern;
mod professional;

pub use creative::CreativeTemplate;
pub use minimal::MinimalTemplate;
pub use modern::ModernTemplate;
pub use professional::ProfessionalTemplate;
