//! XMP Core module
//!
//! Packet location, the XML model the packet is parsed into, the query
//! language used to address it, and [`XmpDocument`] tying them together.

pub mod document;
pub mod error;
pub mod namespace;
pub mod node;
pub mod options;
pub mod packet;
pub mod parser;
pub mod serializer;
pub mod xpath;

pub use document::XmpDocument;
pub use error::{XmpError, XmpResult};
pub use namespace::{ns, NamespaceTable, PrefixResolver};
pub use node::{Attribute, Element, QName, XmlDocument, XmlNode};
pub use options::ScanOptions;
pub use packet::{extract_packet, locate_packet, XMP_END, XMP_START};
pub use parser::{parse_document, PacketParser};
pub use serializer::{serialize_element, XmlSerializer};
pub use xpath::{evaluate, parse_query, Matches, Query};
