//! Per-widget state modules.
//!
//! DESIGN
//! ======
//! Each widget owns a small plain-data state machine (`nav`, `carousel`,
//! `calendar`, etc.) with explicit methods for every user action, so the
//! logic unit-tests on the native target without a document. Components map
//! these states to markup; nothing in this tree touches the DOM.

pub mod booking;
pub mod calendar;
pub mod carousel;
pub mod chat;
pub mod counter;
pub mod faq;
pub mod nav;
