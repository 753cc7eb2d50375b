mod outcome;

#[cfg(feature = "std")]
mod non_error;
