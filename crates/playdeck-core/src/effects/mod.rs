pub mod sparkle;

pub use sparkle::SparkleTrail;
