pub mod use_attendance;
pub mod use_debounced_search;
pub mod use_resource_list;
