//! Generator for EAGLE board files describing a prototyping breadboard PCB.
//!
//! ```ignore
//! let board = generate_default_board(&LayoutParams::default())?;
//! print!("{}", document_to_string(&board.document));
//! ```

pub mod config;
pub mod eagle;
pub mod error;
pub mod layout;
pub mod serialize_xml;
pub mod xml_node;

pub use config::{BoardConfig, CliOptions};
pub use error::{BoardError, NodeError};
pub use layout::{generate_board, generate_default_board, Board, GridSettings, LayoutParams, LayoutStats};
pub use serialize_xml::{document_to_file, document_to_string, serialize, write_document};
pub use xml_node::{AttrValue, XmlNode};
