pub mod mediasort_core;
