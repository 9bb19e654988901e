pub mod shift_flow;
