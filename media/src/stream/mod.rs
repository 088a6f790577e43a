//! Capture streams.
//!
//! A [`MediaStream`] is a bundle of [`MediaTrack`]s handed out by a
//! [`MediaDevices`] implementation. Each track holds a piece of hardware until
//! it is stopped; stopping every track releases the stream.

mod camera_track;
mod constraints;
mod devices;
mod media_stream;
mod track;

pub use camera_track::CameraTrack;
pub use constraints::MediaConstraints;
pub use devices::{MediaDevices, OpenCvDevices};
pub use media_stream::{MediaStream, ReleaseWatch};
pub use track::{MediaTrack, TrackKind, TrackState};
