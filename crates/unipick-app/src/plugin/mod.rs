pub mod actions;
pub mod lookup;
pub mod service;
pub mod settings;

pub use actions::*;
pub use lookup::*;
pub use service::*;
pub use settings::*;
