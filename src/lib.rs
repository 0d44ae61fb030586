//! Push Render - interpret push messages and present them
//!
//! Each delivered message is either rendered as a system notification or
//! forwarded as data to the running application. The decision and every
//! styling property are resolved here; the transport, the OS notification
//! surface and the application callback are ports (see [`surface`]).

pub mod adapters;
pub mod config;
pub mod decision;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod messaging;
pub mod platform;
pub mod receiver;
pub mod render;
pub mod surface;

pub use config::EngineConfig;
pub use decision::{decide, should_render, Decision, ProcessState};
pub use dispatcher::{derive_key, Dispatcher};
pub use error::FieldParseError;
pub use message::{extract, CanonicalFields, IdAssigner, IdStrategy, IncomingMessage, StructuredNotification};
pub use message::fields::Payload;
pub use messaging::{MessagingService, Outcome};
pub use platform::{BundledResources, ChannelRegistry, Platform, ResourceId, ResourceResolver, StaticChannels};
pub use receiver::{DataKeyReceiver, MessageReceiver, ReceiverChain};
pub use render::{NotificationDescriptor, NotificationRenderer};
pub use surface::{AppCallback, NotificationSurface};
pub use adapters::{JsonLinesSurface, RecordingSurface};
