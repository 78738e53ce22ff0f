pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::DynvarsOptions;
pub use config::ResourceFormat;

pub mod expression;
pub use expression::Expression;

pub mod variable;
pub use variable::VariableDefinition;

pub mod definitions;
pub mod resolver;
pub use resolver::resolve_order;
pub use resolver::OrderedVariables;
