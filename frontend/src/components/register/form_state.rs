//! 注册表单状态
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据到核心库表单的转换

use gamepass::auth::{Gender, RegistrationForm};
use leptos::prelude::*;

/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub age: RwSignal<String>,
    pub gender: RwSignal<Gender>,
    pub phone: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            age: RwSignal::new(String::new()),
            gender: RwSignal::new(Gender::default()),
            phone: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
        }
    }

    /// 读取当前输入（不建立响应式依赖）
    pub fn to_form(&self) -> RegistrationForm {
        RegistrationForm {
            name: self.name.get_untracked(),
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
            age: self.age.get_untracked(),
            gender: self.gender.get_untracked(),
            phone: self.phone.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
