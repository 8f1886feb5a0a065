#![allow(dead_code)]

use library_circulation::adapters::mock::{EventLogger, Notifier};
use library_circulation::application::{Library, LoanService};
use library_circulation::domain::{Inventory, Item};
use std::sync::Arc;

/// テスト用の図書館と、副作用チャネルのモック
pub struct TestLibrary {
    pub library: Library,
    pub notifier: Arc<Notifier>,
    pub event_logger: Arc<EventLogger>,
}

/// モックのNotifier/EventLoggerを注入した空の図書館を作る
pub fn create_test_library() -> TestLibrary {
    let notifier = Arc::new(Notifier::new());
    let event_logger = Arc::new(EventLogger::new());
    let loans = LoanService::new(notifier.clone(), event_logger.clone());

    TestLibrary {
        library: Library::new(Inventory::new(), loans),
        notifier,
        event_logger,
    }
}

/// 書籍L001「1984」と雑誌R001を登録済みの図書館
pub fn create_stocked_library() -> TestLibrary {
    let mut test = create_test_library();
    test.library
        .add_item(Item::book("L001", "1984", "George Orwell"));
    test.library
        .add_item(Item::magazine("R001", "Muy Interesante", 203));
    test
}
