pub mod upload_form;
