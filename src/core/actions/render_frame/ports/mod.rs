pub mod pixel_algorithm;
