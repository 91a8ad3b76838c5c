pub mod vda5050_common;
pub mod vda_2_0_0;
