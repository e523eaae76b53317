//! Conversions between the value model and external representations.

mod json;
