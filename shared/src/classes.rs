//! CSS classes emitted by the renderers.

pub const INLINE_CODE: &str =
    "inline-code px-1.5 py-0.5 rounded bg-zinc-800/80 text-zinc-100 font-mono text-[0.85em]";

pub const CARD: &str = "card";
pub const CARD_HEADER: &str = "card-header";
pub const CARD_BODY: &str = "card-body";

pub const CODE_CARD: &str = "code-card my-3 overflow-hidden border-zinc-800 bg-zinc-950 text-zinc-100";
pub const CODE_CARD_HEADER: &str =
    "flex flex-row items-center justify-between px-3 py-2 border-b border-zinc-800";
pub const CODE_CARD_BODY: &str = "p-0";
pub const LANGUAGE_LABEL: &str = "code-language text-[11px] uppercase tracking-wide text-zinc-400";

pub const BUTTON_GHOST: &str = "btn btn-ghost";
pub const BUTTON_SMALL: &str = "btn-sm";
pub const COPY_BUTTON: &str = "copy-button h-7 px-2 text-zinc-300 hover:bg-zinc-800";

pub const CODE_PRE: &str =
    "m-0 w-full max-w-2xl overflow-x-auto overflow-y-hidden p-4 text-sm font-mono whitespace-pre";
pub const CODE_LINE: &str = "code-line";
pub const LINE_NUMBER: &str = "code-line-number select-none pr-4 opacity-50";

pub const LINK: &str = "underline underline-offset-2 hover:opacity-90";
pub const TASK_LIST_ITEM: &str = "task-list-item";
pub const TASK_LIST_CHECKBOX: &str = "task-list-item-checkbox";
