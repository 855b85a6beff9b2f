pub mod aq10;
pub mod atq30;
pub mod bss;
pub mod gad7;
pub mod phq9;
pub mod pswq;
pub mod rrs;
