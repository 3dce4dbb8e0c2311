pub mod sub_breeds;
