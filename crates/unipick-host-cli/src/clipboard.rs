use arboard::Clipboard as ArboardClipboard;
use unipick_app::host::PluginHost;
use unipick_contracts::{AppError, AppResult};

pub struct SystemClipboardHost;

fn map_arboard_error(error: arboard::Error) -> AppError {
    AppError::new("clipboard_error", "剪贴板操作失败").with_source(error)
}

impl PluginHost for SystemClipboardHost {
    fn write_clipboard_text(&self, text: &str) -> AppResult<()> {
        let mut clipboard = ArboardClipboard::new().map_err(map_arboard_error)?;
        clipboard
            .set_text(text.to_string())
            .map_err(map_arboard_error)
    }
}
