use unipick_contracts::AppResult;

pub trait PluginHost: Send + Sync {
    fn write_clipboard_text(&self, text: &str) -> AppResult<()>;
}
