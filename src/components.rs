//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions for the link card fragment
//! and the page layout that wraps rendered Markdown.

pub mod layout;
pub mod link_card;
