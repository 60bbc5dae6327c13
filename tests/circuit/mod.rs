pub mod strategy;

pub mod test_eval;
