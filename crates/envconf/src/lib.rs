//! Sectioned configuration files overlaid with the process environment.
//!
//! A [`Store`] loads `key = value` settings grouped under `[section]`
//! headers and resolves each lookup through an explicit precedence chain
//! over the section map, the environment, and a caller default:
//!
//! | Operation | Order |
//! |---|---|
//! | `get_conf` | config |
//! | `get_env` | environment |
//! | `fetch` | config, then environment |
//! | `get` | environment, then config |
//!
//! ```no_run
//! let mut store = envconf::Store::open("~/.myapp.conf");
//! let port = store.section("server").fetch_or("port", "MYAPP_PORT", "8080").as_uint();
//! store.section_mut("server").put("port", port.to_string())?;
//! store.save()?;
//! # Ok::<(), envconf::EnvconfError>(())
//! ```

mod env;
mod error;
mod parser;
mod path;
mod persistence;
mod section;
mod store;
mod syntax;
mod value;

pub use env::{env_var_or_none, set_env_var};
pub use error::{EnvconfError, IoOp, Result};
pub use parser::{Sections, parse_str, parse_value};
pub use path::{backup_path, expand_home};
pub use persistence::SaveReport;
pub use section::{Section, Source};
pub use store::{DEFAULT_SECTION, Store, StoreBuilder};
pub use syntax::{CommentDelimiter, Syntax};
pub use value::Value;
