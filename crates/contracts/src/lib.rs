//! Общие типы и чистая логика каталога контента (блог, инструменты, авторы).
//!
//! Крейт не выполняет ввода-вывода: локализация строк, фильтрация и подсчёт
//! категорий работают над данными, которые уже лежат в памяти.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
