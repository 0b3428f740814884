//! HTTP layer for Pubstack.
//!
//! This crate owns everything between the TCP connection and the conversion
//! pipeline: route resolution, body collection, JSON deserialization of the
//! inbound record, and response building. The pipeline itself is reached
//! through the [`ConvertHandler`] trait so the HTTP layer stays independent
//! of the core crate; the server binary provides the adapter.
//!
//! # Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `POST` | `/api/convert` | Conversion result as JSON |
//! | `POST` | `/api/convert/file` | XML document as a file attachment |
//! | `GET` | `/health`, `/_health` | Service health JSON |

pub mod body;
pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use body::ResponseBody;
pub use dispatch::ConvertHandler;
pub use service::PublishHttpService;
