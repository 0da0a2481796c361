//! Integration tests for synapsis

mod cli_test;
mod helpers;
mod player_test;
mod sequence_test;
