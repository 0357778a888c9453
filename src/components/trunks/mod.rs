mod list;
mod delete_dialog;
mod endpoint_panel;

pub use list::TrunkList;
pub use delete_dialog::DeleteTrunkDialog;
pub use endpoint_panel::EndpointInfoPanel;
