pub mod detection_form;
pub mod detection_page;
pub mod production_chart;
pub mod result_panel;
