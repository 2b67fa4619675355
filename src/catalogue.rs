//! The endpoint catalogue.
//!
//! Every entry becomes a row of [`ENDPOINTS`] and a helper on [`Client`] that
//! forwards to [`Client::call`]. Helpers take their path arguments in template
//! order followed by an optional [`Query`].

use serde_json::Value;

use crate::client::Client;
use crate::endpoints::{Endpoint, Method};
use crate::error::Result;
use crate::query::Query;

macro_rules! catalogue {
    ($(
        $category:literal {
            $(
                $(#[doc = $doc:literal])*
                $name:ident ( $($arg:ident),* ) => $template:literal;
            )*
        }
    )*) => {
        /// Every endpoint known to the client, in declaration order.
        pub static ENDPOINTS: &[Endpoint] = &[
            $($(
                Endpoint {
                    name: stringify!($name),
                    method: Method::Get,
                    template: $template,
                    path_args: &[$(stringify!($arg)),*],
                    category: $category,
                    doc: concat!($($doc),*),
                },
            )*)*
        ];

        impl Client {
            $($(
                $(#[doc = $doc])*
                pub fn $name(&self, $($arg: &str,)* query: Option<&Query>) -> Result<Value> {
                    self.call(stringify!($name), &[$($arg),*], query)
                }
            )*)*
        }
    };
}

catalogue! {
    "cbt" {
        /// List CBT questions.
        get_soal_cbt() => "siakadcloud/v1/soal-cbt";
        /// CBT question detail.
        get_soal_cbt_by_id(soal_id) => "siakadcloud/v1/soal-cbt/{soal_id}";
        /// List CBT question banks.
        get_bank_soal_cbt() => "siakadcloud/v1/bank-soal-cbt";
        /// CBT question bank detail.
        get_bank_soal_cbt_by_id(bank_id) => "siakadcloud/v1/bank-soal-cbt/{bank_id}";
        /// Questions of one question bank.
        get_soal_by_bank(bank_id) => "siakadcloud/v1/bank-soal-cbt/{bank_id}/soal";
        /// List CBT exams.
        get_ujian_cbt() => "siakadcloud/v1/ujian-cbt";
        /// CBT exam detail.
        get_ujian_cbt_by_id(ujian_id) => "siakadcloud/v1/ujian-cbt/{ujian_id}";
        /// Schedule of one CBT exam.
        get_jadwal_ujian_cbt(ujian_id) => "siakadcloud/v1/ujian-cbt/{ujian_id}/jadwal";
        /// Participants of one CBT exam.
        get_peserta_ujian_cbt(ujian_id) => "siakadcloud/v1/ujian-cbt/{ujian_id}/peserta";
        /// List CBT exam schedules.
        get_jadwal_ujian_cbt_list() => "siakadcloud/v1/jadwal-ujian-cbt";
        /// CBT exam schedule detail.
        get_jadwal_ujian_cbt_by_id(jadwal_id) => "siakadcloud/v1/jadwal-ujian-cbt/{jadwal_id}";
        /// List CBT exam questions.
        get_soal_ujian_cbt() => "siakadcloud/v1/soal-ujian-cbt";
        /// CBT exam question detail.
        get_soal_ujian_cbt_by_id(soal_id) => "siakadcloud/v1/soal-ujian-cbt/{soal_id}";
        /// List CBT exam participants.
        get_peserta_ujian_cbt_list() => "siakadcloud/v1/peserta-ujian-cbt";
        /// CBT exam participant detail.
        get_peserta_ujian_cbt_by_id(peserta_id) => "siakadcloud/v1/peserta-ujian-cbt/{peserta_id}";
        /// List CBT participant answers.
        get_jawaban_peserta_ujian_cbt() => "siakadcloud/v1/jawaban-peserta-ujian-cbt";
        /// CBT participant answer detail.
        get_jawaban_peserta_ujian_cbt_by_id(jawaban_id) => "siakadcloud/v1/jawaban-peserta-ujian-cbt/{jawaban_id}";
    }

    "staff" {
        /// List employees (pegawai).
        get_pegawai() => "siakadcloud/v1/pegawai";
        /// Employee detail.
        get_pegawai_by_id(pegawai_id) => "siakadcloud/v1/pegawai/{pegawai_id}";
        /// Leave records (cuti) of one employee.
        get_pegawai_cuti(pegawai_id) => "siakadcloud/v1/pegawai/{pegawai_id}/cuti";
        /// Permission records (izin) of one employee.
        get_pegawai_izin(pegawai_id) => "siakadcloud/v1/pegawai/{pegawai_id}/izin";
        /// List lecturer attendance records.
        get_presensi_dosen() => "siakadcloud/v1/presensi-dosen";
        /// Lecturer attendance record detail.
        get_presensi_dosen_by_id(presensi_id) => "siakadcloud/v1/presensi-dosen/{presensi_id}";
        /// List lecturers (dosen).
        get_dosen() => "siakadcloud/v1/dosen";
        /// Lecturer detail.
        get_dosen_by_id(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}";
        /// Research of one lecturer.
        get_dosen_penelitian(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/penelitian";
        /// Student evaluations (EDOM) of one lecturer.
        get_dosen_edom(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/edom";
        /// Academic advising (perwalian) of one lecturer.
        get_dosen_perwalian(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/perwalian";
        /// Classes taught by one lecturer.
        get_dosen_kelas(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/kelas";
        /// Teaching schedule of one lecturer.
        get_dosen_jadwal(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/jadwal";
        /// Attendance of one lecturer.
        get_dosen_presensi(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/presensi-dosen";
        /// Community service (pengabdian) of one lecturer.
        get_dosen_pengabdian(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/pengabdian";
        /// Leave records of one lecturer.
        get_dosen_cuti(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/cuti";
        /// Permission records of one lecturer.
        get_dosen_izin(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/izin";
        /// Publications of one lecturer.
        get_dosen_publikasi(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/publikasi";
        /// Patents of one lecturer.
        get_dosen_paten(dosen_id) => "siakadcloud/v1/dosen/{dosen_id}/paten";
    }

    "research" {
        /// List research projects (penelitian).
        get_penelitian() => "siakadcloud/v1/penelitian";
        /// Research project detail.
        get_penelitian_by_id(penelitian_id) => "siakadcloud/v1/penelitian/{penelitian_id}";
        /// Documents of one research project.
        get_dokumen_penelitian(penelitian_id) => "siakadcloud/v1/penelitian/{penelitian_id}/dokumen-penelitian";
        /// Lecturers involved in one research project.
        get_dosen_penelitian_by_id(penelitian_id) => "siakadcloud/v1/penelitian/{penelitian_id}/dosen";
        /// List patents (paten).
        get_paten() => "siakadcloud/v1/paten";
        /// Patent detail.
        get_paten_by_id(paten_id) => "siakadcloud/v1/paten/{paten_id}";
        /// Documents of one patent.
        get_dokumen_paten(paten_id) => "siakadcloud/v1/paten/{paten_id}/dokumen-paten";
        /// Lecturers involved in one patent.
        get_dosen_paten_by_id(paten_id) => "siakadcloud/v1/paten/{paten_id}/dosen";
        /// List patent documents.
        get_dokumen_paten_list() => "siakadcloud/v1/dokumen-paten";
        /// Patent document detail.
        get_dokumen_paten_by_id(dokumen_id) => "siakadcloud/v1/dokumen-paten/{dokumen_id}";
        /// List publications (publikasi).
        get_publikasi() => "siakadcloud/v1/publikasi";
        /// Publication detail.
        get_publikasi_by_id(publikasi_id) => "siakadcloud/v1/publikasi/{publikasi_id}";
        /// Documents of one publication.
        get_dokumen_publikasi(publikasi_id) => "siakadcloud/v1/publikasi/{publikasi_id}/dokumen-publikasi";
        /// Lecturers involved in one publication.
        get_dosen_publikasi_by_id(publikasi_id) => "siakadcloud/v1/publikasi/{publikasi_id}/dosen";
        /// List publication documents.
        get_dokumen_publikasi_list() => "siakadcloud/v1/dokumen-publikasi";
        /// Publication document detail.
        get_dokumen_publikasi_by_id(dokumen_id) => "siakadcloud/v1/dokumen-publikasi/{dokumen_id}";
    }

    "community-service" {
        /// List community service activities (pengabdian).
        get_pengabdian() => "siakadcloud/v1/pengabdian";
        /// Community service activity detail.
        get_pengabdian_by_id(pengabdian_id) => "siakadcloud/v1/pengabdian/{pengabdian_id}";
        /// Documents of one community service activity.
        get_dokumen_pengabdian(pengabdian_id) => "siakadcloud/v1/pengabdian/{pengabdian_id}/dokumen-pengabdian";
        /// List community service documents.
        get_dokumen_pengabdian_list() => "siakadcloud/v1/dokumen-pengabdian";
        /// Community service document detail.
        get_dokumen_pengabdian_by_id(dokumen_id) => "siakadcloud/v1/dokumen-pengabdian/{dokumen_id}";
    }

    "finance" {
        /// List invoices.
        get_invoice() => "siakadcloud/v1/invoice";
        /// Invoice detail.
        get_invoice_by_id(invoice_id) => "siakadcloud/v1/invoice/{invoice_id}";
        /// List payments (pembayaran).
        get_pembayaran() => "siakadcloud/v1/pembayaran";
        /// Payment detail.
        get_pembayaran_by_id(pembayaran_id) => "siakadcloud/v1/pembayaran/{pembayaran_id}";
    }

    "misc" {
        /// List study concentrations (konsentrasi).
        get_konsentrasi() => "siakadcloud/v1/konsentrasi";
        /// Study concentration detail.
        get_konsentrasi_by_id(konsentrasi_id) => "siakadcloud/v1/konsentrasi/{konsentrasi_id}";
        /// Study programs of one concentration.
        get_program_studi_by_konsentrasi(konsentrasi_id) => "siakadcloud/v1/konsentrasi/{konsentrasi_id}/program-studi";
        /// List applicant requirement files.
        get_berkas_syarat_pendaftar() => "siakadcloud/v1/berkas-syarat-pendaftar";
        /// Applicant requirement file detail.
        get_berkas_syarat_pendaftar_by_id(berkas_id) => "siakadcloud/v1/berkas-syarat-pendaftar/{berkas_id}";
        /// List research documents.
        get_dokumen_penelitian_list() => "siakadcloud/v1/dokumen-penelitian";
        /// Research document detail.
        get_dokumen_penelitian_by_id(dokumen_id) => "siakadcloud/v1/dokumen-penelitian/{dokumen_id}";
    }

    "edlink" {
        /// List teaching materials (bahan ajar).
        get_bahan_ajar() => "edlink/v1/bahan-ajar";
        /// Teaching material detail.
        get_bahan_ajar_by_id(bahan_id) => "edlink/v1/bahan-ajar/{bahan_id}";
        /// List EdLink classes.
        get_kelas_edlink() => "edlink/v1/kelas";
        /// EdLink class detail.
        get_kelas_edlink_by_id(kelas_id) => "edlink/v1/kelas/{kelas_id}";
        /// List class sessions (sesi).
        get_sesi() => "edlink/v1/sesi";
        /// Class session detail.
        get_sesi_by_id(sesi_id) => "edlink/v1/sesi/{sesi_id}";
        /// List class teachers.
        get_pengajar_kelas() => "edlink/v1/pengajar-kelas";
        /// Class teacher detail.
        get_pengajar_kelas_by_id(pengajar_id) => "edlink/v1/pengajar-kelas/{pengajar_id}";
        /// List class participants.
        get_peserta_kelas() => "edlink/v1/peserta-kelas";
        /// Class participant detail.
        get_peserta_kelas_by_id(peserta_id) => "edlink/v1/peserta-kelas/{peserta_id}";
        /// List class attendance records.
        get_presensi_kelas() => "edlink/v1/presensi-kelas";
        /// Class attendance record detail.
        get_presensi_kelas_by_id(presensi_id) => "edlink/v1/presensi-kelas/{presensi_id}";
        /// List assignments (tugas).
        get_tugas() => "edlink/v1/tugas";
        /// Assignment detail.
        get_tugas_by_id(tugas_id) => "edlink/v1/tugas/{tugas_id}";
        /// List EdLink questions.
        get_soal_edlink() => "edlink/v1/soal";
        /// EdLink question detail.
        get_soal_edlink_by_id(soal_id) => "edlink/v1/soal/{soal_id}";
        /// List quiz participants.
        get_peserta_kuis() => "edlink/v1/peserta-kuis";
        /// Quiz participant detail.
        get_peserta_kuis_by_id(peserta_id) => "edlink/v1/peserta-kuis/{peserta_id}";
    }

    "mbkm" {
        /// List MBKM partners (mitra).
        get_mitra_mbkm() => "siakadcloud/v1/mitra-mbkm";
        /// MBKM partner detail.
        get_mitra_mbkm_by_id(mitra_id) => "siakadcloud/v1/mitra-mbkm/{mitra_id}";
        /// Job positions offered by one MBKM partner.
        get_posisi_pekerjaan_mbkm(mitra_id) => "siakadcloud/v1/mitra-mbkm/{mitra_id}/posisi-pekerjaan";
        /// List MBKM programs.
        get_program_mbkm() => "siakadcloud/v1/program-mbkm";
        /// MBKM program detail.
        get_program_mbkm_by_id(program_id) => "siakadcloud/v1/program-mbkm/{program_id}";
        /// List MBKM participants.
        get_peserta_mbkm() => "siakadcloud/v1/peserta-mbkm";
        /// MBKM participant detail.
        get_peserta_mbkm_by_id(peserta_id) => "siakadcloud/v1/peserta-mbkm/{peserta_id}";
    }

    "students" {
        /// List students (mahasiswa).
        get_mahasiswa() => "siakadcloud/v1/mahasiswa";
        /// Student detail.
        get_mahasiswa_by_id(mahasiswa_id) => "siakadcloud/v1/mahasiswa/{mahasiswa_id}";
        /// Attendance of one student.
        get_presensi_mahasiswa(mahasiswa_id) => "siakadcloud/v1/mahasiswa/{mahasiswa_id}/presensi";
        /// Grades (nilai) of one student.
        get_nilai_mahasiswa(mahasiswa_id) => "siakadcloud/v1/mahasiswa/{mahasiswa_id}/nilai";
        /// List student violations.
        get_pelanggaran_mahasiswa() => "siakadcloud/v1/pelanggaran-mahasiswa";
        /// Student violation detail.
        get_pelanggaran_mahasiswa_by_id(pelanggaran_id) => "siakadcloud/v1/pelanggaran-mahasiswa/{pelanggaran_id}";
        /// List grade weightings.
        get_proporsi_nilai_mahasiswa() => "siakadcloud/v1/proporsi-nilai-mahasiswa";
        /// Grade weighting detail.
        get_proporsi_nilai_mahasiswa_by_id(proporsi_id) => "siakadcloud/v1/proporsi-nilai-mahasiswa/{proporsi_id}";
        /// List applicants (pendaftar).
        get_pendaftar() => "siakadcloud/v1/pendaftar";
        /// Applicant detail.
        get_pendaftar_by_id(pendaftar_id) => "siakadcloud/v1/pendaftar/{pendaftar_id}";
        /// Study program choices of one applicant.
        get_program_studi_pendaftar(pendaftar_id) => "siakadcloud/v1/pendaftar/{pendaftar_id}/program-studi-pendaftar";
        /// Selection results of one applicant.
        get_seleksi_pendaftar(pendaftar_id) => "siakadcloud/v1/pendaftar/{pendaftar_id}/seleksi";
    }

    "academic" {
        /// List study programs (program studi).
        get_program_studi() => "siakadcloud/v1/program-studi";
        /// Study program detail.
        get_program_studi_by_id(program_studi_id) => "siakadcloud/v1/program-studi/{program_studi_id}";
        /// List courses (mata kuliah).
        get_mata_kuliah() => "siakadcloud/v1/mata-kuliah";
        /// Course detail.
        get_mata_kuliah_by_id(mata_kuliah_id) => "siakadcloud/v1/mata-kuliah/{mata_kuliah_id}";
        /// List classes (kelas).
        get_kelas() => "siakadcloud/v1/kelas";
        /// Class detail.
        get_kelas_by_id(kelas_id) => "siakadcloud/v1/kelas/{kelas_id}";
        /// List schedules (jadwal).
        get_jadwal() => "siakadcloud/v1/jadwal";
        /// Schedule detail.
        get_jadwal_by_id(jadwal_id) => "siakadcloud/v1/jadwal/{jadwal_id}";
        /// List course learning outcomes (CPMK).
        get_cpmk() => "siakadcloud/v1/cpmk";
        /// Course learning outcome detail.
        get_cpmk_by_id(cpmk_id) => "siakadcloud/v1/cpmk/{cpmk_id}";
    }
}
