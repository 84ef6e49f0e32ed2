use super::form_controls::{
    is_checkbox_or_radio_input_element, is_radio_input, is_select, is_textarea,
};
use super::html::is_void_tag;
use super::*;

mod checked_group;
mod dump;
mod form_control_value;
mod lookup_traversal;
mod select_option_sync;
