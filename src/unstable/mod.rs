pub mod lomuto;
pub mod quicksort;
