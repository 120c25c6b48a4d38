//! コンサルタントの週次time cardを集計し、クライアントごとの月次請求書を作成する。
//!
//! time cardの選択と並び替えは`time_card_list`、請求書の明細抽出とページ分けした
//! レポートの作成は`invoice`が担う。入出力と設定はそれぞれ`dataset`と`config`にある。

pub mod account;
pub mod address;
pub mod config;
pub mod console;
pub mod consultant;
pub mod consultant_time;
pub mod dataset;
pub mod date_range;
pub mod datetime;
pub mod error;
pub mod invoice;
pub mod invoice_command;
pub mod invoice_header;
pub mod invoice_line_item;
pub mod personal_name;
pub mod skill;
pub mod time_card;
pub mod time_card_list;
pub mod time_cards_command;
