use common::form::FormField;

pub enum Msg {
    Input(FormField, String),
    Submit,
    SaveSucceeded,
    SaveFailed,
    Cancel,
}
