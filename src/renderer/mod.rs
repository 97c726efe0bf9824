//! SVG primitives for illustrations and documents
//!
//! Every illustration and the certificate page are assembled from these
//! primitives with an [`SvgBuilder`] and serialized according to an
//! [`SvgConfig`].

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{
    escape_xml, num, polar, Arrow, Circle, Element, Frame, Label, Line, Path, Point, Polyline,
    Rect, SvgBuilder, Text, TextAnchor,
};
