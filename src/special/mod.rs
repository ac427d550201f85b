pub mod lambert_w;
