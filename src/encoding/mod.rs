//! # Encoding Module
//!
//! This module provides encoding utilities for OpalDB, including:
//!
//! - **128-bit integer text codec**: radix 2-36 formatting and parsing for
//!   wide integer columns

pub mod int128;

pub use int128::{
    format_i128, format_i128_into, format_u128, format_u128_into, parse_i128, parse_u128,
    Int128Format, MAX_ENCODED_LEN,
};
