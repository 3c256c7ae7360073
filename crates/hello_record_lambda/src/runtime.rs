pub use hello_record_core::{config, contract};
