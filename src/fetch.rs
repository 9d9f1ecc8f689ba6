//! 视图数据的加载状态机
//!
//! `Idle -> Loading -> (Ready | Failed)`，每次 `begin` 都会签发新的票据；
//! 只有最新票据的结果会被接受，过期的响应直接丢弃。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// 视图实际要渲染的分支
#[derive(Debug, PartialEq)]
pub enum FetchView<'a, T> {
    Idle,
    Loading,
    Failed(&'a str),
    Empty,
    Entries(&'a [T]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    data: Vec<T>,
    phase: FetchPhase,
    generation: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            phase: FetchPhase::Idle,
            generation: 0,
        }
    }
}

impl<T> FetchState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 进入加载状态，旧数据保留到新结果到达
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.phase = FetchPhase::Loading;
        Ticket(self.generation)
    }

    /// 作废进行中的请求（弹窗关闭、组件卸载）
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.phase == FetchPhase::Loading {
            self.phase = FetchPhase::Idle;
        }
    }

    /// 返回结果是否被接受
    pub fn resolve(&mut self, ticket: Ticket, data: Vec<T>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.data = data;
        self.phase = FetchPhase::Ready;
        true
    }

    /// 失败时保留上一次成功的数据
    pub fn reject(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.phase = FetchPhase::Failed(message.into());
        true
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn view(&self) -> FetchView<'_, T> {
        match &self.phase {
            FetchPhase::Idle => FetchView::Idle,
            FetchPhase::Loading => FetchView::Loading,
            FetchPhase::Failed(msg) => FetchView::Failed(msg),
            FetchPhase::Ready if self.data.is_empty() => FetchView::Empty,
            FetchPhase::Ready => FetchView::Entries(&self.data),
        }
    }
}
