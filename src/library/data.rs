//! Built-in catalog shipped with the client.

use crate::domain::MaterialType;

use super::catalog::{Catalog, CatalogMaterial, Category, Level, Subject};

fn video(title: &str, duration: &str) -> CatalogMaterial {
    timed(MaterialType::Video, title, duration)
}

fn audio(title: &str, duration: &str) -> CatalogMaterial {
    timed(MaterialType::Audio, title, duration)
}

fn timed(kind: MaterialType, title: &str, duration: &str) -> CatalogMaterial {
    CatalogMaterial {
        kind,
        title: title.to_string(),
        duration: Some(duration.to_string()),
        pages: None,
        url: Some("#".to_string()),
        description: None,
        id: None,
        views: None,
    }
}

fn pdf(title: &str, pages: u32) -> CatalogMaterial {
    CatalogMaterial {
        kind: MaterialType::Pdf,
        title: title.to_string(),
        duration: None,
        pages: Some(pages),
        url: Some("#".to_string()),
        description: None,
        id: None,
        views: None,
    }
}

fn level(key: &str, name: &str, materials: Vec<CatalogMaterial>) -> Level {
    Level {
        key: key.to_string(),
        name: name.to_string(),
        materials,
    }
}

fn subject(
    key: &str,
    title: &str,
    icon: &str,
    gradient: &str,
    category: Category,
    levels: Vec<Level>,
) -> Subject {
    Subject {
        key: key.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        gradient: gradient.to_string(),
        category,
        levels,
    }
}

impl Catalog {
    /// The built-in subject table
    pub fn builtin() -> Self {
        Self {
            subjects: vec![
                mathematics(),
                physics(),
                chemistry(),
                english(),
                russian(),
                world_history(),
                uzbekistan_history(),
            ],
        }
    }
}

fn mathematics() -> Subject {
    subject(
        "mathematics",
        "Matematika",
        "📐",
        "linear-gradient(135deg, #667eea, #764ba2)",
        Category::Exact,
        vec![
            level(
                "beginner",
                "Boshlang'ich matematika",
                vec![
                    video("Arifmetika asoslari", "45 min"),
                    pdf("Sonlar va amallar", 120),
                    audio("Ko'paytirish jadvali", "20 min"),
                    video("Kasrlar bilan ishlash", "35 min"),
                    pdf("Geometriya asoslari", 80),
                ],
            ),
            level(
                "intermediate",
                "O'rta matematika",
                vec![
                    video("Algebra asoslari", "60 min"),
                    pdf("Tenglamalar va tengsizliklar", 150),
                    video("Funksiyalar", "50 min"),
                    pdf("Trigonometriya", 100),
                    video("Logarifmlar", "40 min"),
                ],
            ),
            level(
                "advanced",
                "Oliy matematika",
                vec![
                    video("Limitlar va uzluksizlik", "70 min"),
                    pdf("Hosilalar", 180),
                    video("Integrallar", "65 min"),
                    pdf("Differensial tenglamalar", 200),
                    video("Chiziqli algebra", "55 min"),
                ],
            ),
        ],
    )
}

fn physics() -> Subject {
    subject(
        "physics",
        "Fizika",
        "⚛️",
        "linear-gradient(135deg, #4facfe, #00f2fe)",
        Category::Exact,
        vec![
            level(
                "beginner",
                "Boshlang'ich fizika",
                vec![
                    video("Mexanika asoslari", "50 min"),
                    pdf("Harakat va kuch", 110),
                    video("Energiya va quvvat", "40 min"),
                    pdf("Issiqlik va temperatura", 90),
                ],
            ),
            level(
                "intermediate",
                "O'rta fizika",
                vec![
                    video("Elektr va magnetizm", "65 min"),
                    pdf("Optika", 130),
                    video("To'lqinlar va tebranishlar", "55 min"),
                    pdf("Molekulyar fizika", 140),
                ],
            ),
            level(
                "advanced",
                "Oliy fizika",
                vec![
                    video("Kvant mexanikasi", "75 min"),
                    pdf("Atom va yadro fizikasi", 190),
                    video("Nisbiylik nazariyasi", "60 min"),
                    pdf("Zarralar fizikasi", 170),
                ],
            ),
        ],
    )
}

fn chemistry() -> Subject {
    subject(
        "chemistry",
        "Kimyo",
        "🧪",
        "linear-gradient(135deg, #43e97b, #38f9d7)",
        Category::Exact,
        vec![
            level(
                "beginner",
                "Umumiy kimyo",
                vec![
                    video("Atomlar va molekulalar", "45 min"),
                    pdf("Davriy jadval", 100),
                    video("Kimyoviy bog'lanishlar", "50 min"),
                    pdf("Kimyoviy reaksiyalar", 120),
                ],
            ),
            level(
                "intermediate",
                "Noorganik kimyo",
                vec![
                    video("Metallar va nometallar", "55 min"),
                    pdf("Kislotalar va asoslar", 110),
                    video("Oksidlanish-qaytarilish", "48 min"),
                    pdf("Elektrolitlar", 95),
                ],
            ),
            level(
                "advanced",
                "Organik kimyo",
                vec![
                    video("Uglevodorodlar", "60 min"),
                    pdf("Funksional guruhlar", 150),
                    video("Polimerlar", "52 min"),
                    pdf("Biokimyo asoslari", 140),
                ],
            ),
        ],
    )
}

fn english() -> Subject {
    subject(
        "english",
        "Ingliz tili",
        "🇬🇧",
        "linear-gradient(135deg, #fa709a, #fee140)",
        Category::Languages,
        vec![
            level(
                "beginner",
                "A1-A2 (Boshlang'ich)",
                vec![
                    audio("Alfabet va talaffuz", "30 min"),
                    pdf("Oddiy grammatika", 80),
                    video("Kundalik so'zlar", "40 min"),
                    audio("Suhbat amaliyoti", "35 min"),
                    pdf("1000 ta asosiy so'z", 60),
                ],
            ),
            level(
                "intermediate",
                "B1-B2 (O'rta)",
                vec![
                    video("Grammatika chuqurlashtirilgan", "55 min"),
                    pdf("Idiomalar va iboralar", 120),
                    audio("Tinglab tushunish", "45 min"),
                    video("Business English", "50 min"),
                    pdf("Essay yozish", 90),
                ],
            ),
            level(
                "advanced",
                "C1-C2 (Yuqori)",
                vec![
                    video("Academic English", "65 min"),
                    pdf("Murakkab grammatika", 150),
                    audio("Native speakers bilan suhbat", "60 min"),
                    video("IELTS/TOEFL tayyorgarlik", "70 min"),
                    pdf("Adabiy matnlar tahlili", 130),
                ],
            ),
        ],
    )
}

fn russian() -> Subject {
    subject(
        "russian",
        "Rus tili",
        "🇷🇺",
        "linear-gradient(135deg, #f093fb, #f5576c)",
        Category::Languages,
        vec![
            level(
                "beginner",
                "Boshlang'ich",
                vec![
                    audio("Alifbo va talaffuz", "35 min"),
                    pdf("Oddiy grammatika", 85),
                    video("Kundalik suhbatlar", "42 min"),
                    pdf("Asosiy so'zlar", 70),
                ],
            ),
            level(
                "intermediate",
                "O'rta",
                vec![
                    video("Grammatika chuqurlashtirilgan", "58 min"),
                    pdf("Kelishiklar tizimi", 110),
                    audio("Tinglab tushunish", "48 min"),
                    video("Rasmiy uslub", "45 min"),
                ],
            ),
            level(
                "advanced",
                "Yuqori",
                vec![
                    video("Adabiy rus tili", "62 min"),
                    pdf("Murakkab sintaksis", 140),
                    audio("Klassik adabiyot", "55 min"),
                    pdf("Ilmiy uslub", 120),
                ],
            ),
        ],
    )
}

fn world_history() -> Subject {
    subject(
        "worldHistory",
        "Jahon tarixi",
        "🌍",
        "linear-gradient(135deg, #ff9a9e, #fecfef)",
        Category::Humanities,
        vec![
            level(
                "ancient",
                "Qadimgi dunyo",
                vec![
                    video("Qadimgi Misr", "50 min"),
                    pdf("Mesopotamiya sivilizatsiyalari", 130),
                    video("Qadimgi Yunoniston", "55 min"),
                    pdf("Rim imperiyasi", 150),
                ],
            ),
            level(
                "medieval",
                "O'rta asrlar",
                vec![
                    video("Feodalizm davri", "48 min"),
                    pdf("Islom sivilizatsiyasi", 140),
                    video("Uyg'onish davri", "52 min"),
                    pdf("Buyuk geografik kashfiyotlar", 120),
                ],
            ),
            level(
                "modern",
                "Zamonaviy tarix",
                vec![
                    video("Sanoat inqilobi", "58 min"),
                    pdf("Jahon urushlar", 180),
                    video("Sovuq urush", "60 min"),
                    pdf("XXI asr globallashuvi", 160),
                ],
            ),
        ],
    )
}

fn uzbekistan_history() -> Subject {
    subject(
        "uzbekistanHistory",
        "O'zbekiston tarixi",
        "🇺🇿",
        "linear-gradient(135deg, #a8edea, #fed6e3)",
        Category::Humanities,
        vec![
            level(
                "ancient",
                "Qadimgi O'zbekiston",
                vec![
                    video("Baqtriya va Sug'd", "45 min"),
                    pdf("Xorazm sivilizatsiyasi", 110),
                    video("Buyuk Ipak yo'li", "50 min"),
                    pdf("Qadimgi shaharlar", 95),
                ],
            ),
            level(
                "independence",
                "Mustaqillik davri",
                vec![
                    video("Mustaqillik e'lon qilinishi", "40 min"),
                    pdf("Konstitutsiya asoslari", 80),
                    video("Iqtisodiy islohotlar", "48 min"),
                    pdf("Demokratik jamiyat qurish", 100),
                ],
            ),
            level(
                "modern",
                "Zamonaviy O'zbekiston",
                vec![
                    video("Yangi O'zbekiston strategiyasi", "52 min"),
                    pdf("Raqamli iqtisodiyot", 120),
                    video("Xalqaro hamkorlik", "45 min"),
                    pdf("Ta'lim islohotlari", 90),
                ],
            ),
        ],
    )
}
