pub mod webp;
