// 問い合わせフォームから送られる内容。各項目は空でないことを api 側で確認済み
#[derive(Debug, Clone)]
pub struct CreateInquiry {
    pub name: String,
    pub email: String,
    pub inquiry: String,
}
