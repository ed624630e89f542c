pub mod board;
pub mod drag;
pub mod id;
pub mod list;
pub mod reorder;
pub mod task;

pub use board::{Board, BoardConfig};
pub use drag::{
    ActiveItem, BoardController, DragEnd, DragEvent, DragOver, DragRef, DragStart, DragState,
    DropTarget,
};
pub use id::{IdGenerator, IdStrategy, ListId, TaskId};
pub use list::List;
pub use reorder::array_move;
pub use task::Task;
