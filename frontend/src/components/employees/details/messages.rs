use common::model::employee::Employee;

pub enum Msg {
    Load,
    Loaded(Employee),
    LoadFailed { id: i64, message: String },
    Edit,
}
