pub mod lane_input;
