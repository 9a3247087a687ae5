pub mod fixtures;

#[cfg(test)]
mod talk_tests;
#[cfg(test)]
mod lookup_tests;
