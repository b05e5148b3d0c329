mod task;
mod task_list;

pub use task::{chunk_text, parse_date, parse_time, Priority, Task, UrgencyTag, CHUNK_WIDTH};
pub use task_list::TaskList;
