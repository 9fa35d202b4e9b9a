use bon::Builder;

/// 单个事件的默认监听器告警阈值
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// 发射器配置
///
/// ```
/// use emitter::EmitterConfig;
///
/// let config = EmitterConfig::builder().max_listeners(32).build();
/// assert_eq!(config.max_listeners, 32);
/// assert_eq!(EmitterConfig::default().max_listeners, 10);
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmitterConfig {
    /// 单个事件的监听器数量超过该值时输出一次告警（常见于监听器泄漏），不拒绝注册；
    /// 为 0 时关闭告警
    #[builder(default = DEFAULT_MAX_LISTENERS)]
    pub max_listeners: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EmitterConfig {
    /// 注册后数量为 `count` 时是否恰好越过阈值
    pub(crate) fn crosses_limit(&self, count: usize) -> bool {
        self.max_listeners > 0 && count == self.max_listeners + 1
    }
}
