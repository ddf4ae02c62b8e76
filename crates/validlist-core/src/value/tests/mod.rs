//! Tests for key and outcome types.

mod key;
