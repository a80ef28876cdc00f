//! Static site content: landing-page sections, footer links and contact data.

pub struct Goal {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Link {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub const TAGLINE: &str = "Sistem Pendaftaran Ulang Mahasiswa Baru";
pub const SUBTITLE: &str = "Sistem Pendaftaran Ulang Mahasiswa Teknik Informatika";
pub const INTRO: &str = "SIRENA-TI adalah platform resmi untuk pendaftaran ulang mahasiswa baru \
    jurusan Teknik Informatika. Sistem ini dirancang untuk memudahkan proses administrasi dan \
    memastikan semua mahasiswa baru terdaftar dengan benar.";

pub const CONTACT_EMAIL: &str = "hmjtiundiksha@gmail.com";
pub const CONTACT_ADDRESS: &str =
    "Jl. Udayana No.11, Banjar Tegal, Singaraja, Kabupaten Buleleng, Bali";
pub const ORGANIZATION: &str = "HMJ TI Undiksha";
pub const CREDITS: &str = "GanaDev Com X Web Dev HMJ TI";

/// Invite link of the department-wide WhatsApp group.
pub const DEPARTMENT_WHATSAPP_GROUP: &str = "https://chat.whatsapp.com/JXK63swHy1t9krbRbJ9qCG";

pub const GOALS: &[Goal] = &[
    Goal {
        title: "Mudah Digunakan",
        description: "Mempermudah dalam melakukan proses pendaftaran ulang mahasiswa baru \
            jurusan Teknik Informatika Undiksha",
    },
    Goal {
        title: "Ramah Kertas",
        description: "Mengurangi penggunaan kertas sekali pakai yang biasanya digunakan dalam \
            setiap berkas yang dikumpul pada proses pendaftaran ulang secara konvensional",
    },
    Goal {
        title: "Proses Mudah",
        description: "Mempermudah dalam melakukan pendataan, verifikasi data, hingga pembagian \
            grup WhatsApp untuk mahasiswa baru",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Apa saja dokumen yang perlu disiapkan untuk pendaftaran ulang?",
        answer: "Dokumen yang perlu disiapkan adalah bukti penerimaan mahasiswa (dapat berupa \
            screenshot atau PDF), kartu identitas, dan foto formal terbaru.",
    },
    Faq {
        question: "Bagaimana jika saya belum mendapatkan NIM?",
        answer: "Jika Anda belum mendapatkan NIM, Anda tetap dapat mendaftar dengan memilih \
            program studi pada dropdown yang tersedia di formulir pendaftaran.",
    },
    Faq {
        question: "Kapan saya akan mendapatkan informasi kelompok orientasi?",
        answer: "Informasi kelompok orientasi akan dibagikan melalui email dan grup WhatsApp \
            resmi setelah proses verifikasi data selesai.",
    },
    Faq {
        question: "Apakah saya perlu membayar biaya pendaftaran ulang?",
        answer: "Tidak, pendaftaran ulang tidak dipungut biaya. Namun, akan ada biaya untuk \
            kegiatan orientasi yang akan diinformasikan kemudian.",
    },
    Faq {
        question: "Bagaimana jika saya mengalami kendala teknis saat pendaftaran?",
        answer: "Anda dapat menghubungi tim support melalui email support@sirena-ti.ac.id atau \
            melalui WhatsApp di nomor yang tercantum di bagian footer website.",
    },
];

pub const QUICK_LINKS: &[Link] = &[
    Link {
        name: "Web HMJ",
        url: "https://hmjti.undiksha.ac.id/",
        description: "Website resmi HMJ Teknik Informatika Undiksha",
    },
    Link {
        name: "Web Integer",
        url: "https://hmjti.undiksha.ac.id/integer",
        description: "Website Integer HMJ Teknik Informatika",
    },
    Link {
        name: "EORS",
        url: "https://eors.hmjtiundiksha.com/",
        description: "Electronic Open Recruitment System HMJ TI",
    },
    Link {
        name: "ETIKA",
        url: "https://etika.hmjtiundiksha.com/",
        description: "Sistem ETIKA HMJ Teknik Informatika",
    },
    Link {
        name: "Iuran HMJ",
        url: "https://iuran.hmjtiundiksha.com/",
        description: "Sistem Iuran HMJ Teknik Informatika",
    },
    Link {
        name: "Inventaris",
        url: "https://inventaris.hmjtiundiksha.com/status-barang",
        description: "Sistem Inventaris HMJ Teknik Informatika",
    },
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link {
        name: "Facebook",
        url: "https://facebook.com/hmjtiundiksha",
        description: "Facebook HMJ TI Undiksha",
    },
    Link {
        name: "Instagram",
        url: "https://instagram.com/hmjti_undiksha",
        description: "Instagram HMJ TI Undiksha",
    },
    Link {
        name: "YouTube",
        url: "https://youtube.com/@hmjtiundiksha",
        description: "YouTube HMJ TI Undiksha",
    },
];
