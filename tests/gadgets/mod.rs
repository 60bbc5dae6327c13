pub mod test_adder;
pub mod test_hamming;
