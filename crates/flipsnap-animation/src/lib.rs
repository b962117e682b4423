//! Animation system for flipsnap
//!
//! Declarative CSS transitions do most of the work on capable platforms.
//! This crate provides the curve they are described with, the easing
//! curves, and the [`OffsetAnimator`] fallback that interpolates an offset
//! on a timer when transitions are unavailable.

mod animation;

pub use animation::*;
