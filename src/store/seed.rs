//! Startup seed data
//!
//! Reproduces the registry's reference dataset: 15 clients, 15 equipment
//! units, 15 users, 15 assignments (two retired) and 15 status records,
//! plus the brand/model/logo reference tables. Seed credentials are hashed
//! with the same scheme as user creation; no plaintext survives seeding.

use chrono::Utc;

use super::{Store, Tables};
use crate::{
    error::AppResult,
    models::{
        asignacion::Asignacion,
        cliente::Cliente,
        equipo::Equipo,
        estado::{EstadoCenso, EstadoEquipo},
        referencia::{Logo, Marca, Modelo},
        usuario::{Rol, Usuario},
    },
    services::usuarios::hash_password,
};

const CLIENTES: &[(&str, &str, &str, &str, bool)] = &[
    ("Juan Pérez", "juan@email.com", "0981-123456", "Asunción", true),
    ("María García", "maria@email.com", "0984-654321", "Luque", true),
    ("Carlos López", "carlos@email.com", "0985-789123", "San Lorenzo", true),
    ("Ana Torres", "ana@email.com", "0971-222333", "Fernando de la Mora", true),
    ("Luis González", "luis@email.com", "0972-444555", "Lambaré", false),
    ("Marta Rivas", "marta@email.com", "0961-666777", "Encarnación", true),
    ("Diego Silva", "diego@email.com", "0962-888999", "Capiatá", true),
    ("Lucía Benítez", "lucia@email.com", "0983-121314", "Itauguá", true),
    ("Pedro Duarte", "pedro@email.com", "0986-151617", "Villa Elisa", true),
    ("Gabriela Fernández", "gaby@email.com", "0973-181920", "Ñemby", true),
    ("Rodrigo Medina", "rodrigo@email.com", "0963-212223", "Caacupé", false),
    ("Camila Ortiz", "camila@email.com", "0974-242526", "Coronel Oviedo", true),
    ("Santiago Cabrera", "santiago@email.com", "0964-272829", "Paraguarí", true),
    ("Patricia Villalba", "patricia@email.com", "0987-303132", "Ciudad del Este", true),
    ("Hugo Ramírez", "hugo@email.com", "0975-333444", "Areguá", true),
];

const EQUIPOS: &[(&str, &str, &str, &str)] = &[
    ("REF001", "Samsung", "RT38K5932SL", "Refrigerador No Frost"),
    ("REF002", "LG", "GS65SPP1", "Refrigerador Side by Side"),
    ("REF003", "Whirlpool", "WRM35AKTWW", "Refrigerador Convencional"),
    ("REF004", "Electrolux", "DF35", "Freezer Vertical"),
    ("REF005", "Panasonic", "NR-BL389", "Refrigerador Inverter"),
    ("REF006", "Midea", "HS-384", "Freezer Horizontal"),
    ("REF007", "Bosch", "KSV36VI3P", "Refrigerador Inteligente"),
    ("REF008", "Daewoo", "FRS-U20", "Refrigerador Side by Side"),
    ("REF009", "GE", "GTS18", "Refrigerador Convencional"),
    ("REF010", "Sharp", "SJ-FS85", "Refrigerador No Frost"),
    ("REF011", "Samsung", "RB29HSR2DWW", "Refrigerador Inverter"),
    ("REF012", "LG", "GC-X247", "Refrigerador Door-in-Door"),
    ("REF013", "Whirlpool", "WRF535SMHZ", "French Door"),
    ("REF014", "Electrolux", "TF39", "Refrigerador Convencional"),
    ("REF015", "Panasonic", "NR-BY602", "Refrigerador No Frost"),
];

const USUARIOS: &[(&str, &str, &str, Rol)] = &[
    ("Admin", "admin@sistema.com", "admin123", Rol::Administrador),
    ("Técnico 1", "tecnico1@sistema.com", "tec123", Rol::Tecnico),
    ("Técnico 2", "tecnico2@sistema.com", "tec234", Rol::Tecnico),
    ("Técnico 3", "tecnico3@sistema.com", "tec345", Rol::Tecnico),
    ("Supervisor", "supervisor@sistema.com", "sup123", Rol::Supervisor),
    ("Gerente", "gerente@sistema.com", "ger123", Rol::Administrador),
    ("Operador 1", "operador1@sistema.com", "ope123", Rol::Operador),
    ("Operador 2", "operador2@sistema.com", "ope234", Rol::Operador),
    ("Operador 3", "operador3@sistema.com", "ope345", Rol::Operador),
    ("Supervisor 2", "supervisor2@sistema.com", "sup234", Rol::Supervisor),
    ("Soporte 1", "soporte1@sistema.com", "sop123", Rol::Soporte),
    ("Soporte 2", "soporte2@sistema.com", "sop234", Rol::Soporte),
    ("Invitado", "invitado@sistema.com", "inv123", Rol::Invitado),
    ("Auditor", "auditor@sistema.com", "aud123", Rol::Auditor),
    ("Root", "root@sistema.com", "root123", Rol::Administrador),
];

/// Retired seed assignments (equipment back in the depot)
const ASIGNACIONES_RETIRADAS: &[i32] = &[5, 11];

type EstadoSeed = (
    bool,
    &'static str,
    Option<f64>,
    Option<f64>,
    f64,
    f64,
);

const ESTADOS: &[EstadoSeed] = &[
    (true, "Funcionando correctamente", Some(4.2), Some(-18.5), -25.2637, -57.5759),
    (false, "Problema de temperatura", Some(8.5), Some(-12.0), -25.2800, -57.6300),
    (true, "Óptimas condiciones", Some(3.9), Some(-19.1), -25.3100, -57.6000),
    (true, "Funcionando estable", Some(5.0), Some(-17.0), -25.2950, -57.5800),
    (false, "Apagado por cliente", None, None, -25.3200, -57.6100),
    (true, "Sin anomalías", Some(4.5), Some(-18.2), -25.2805, -57.5990),
    (true, "Correcto funcionamiento", Some(4.0), Some(-18.0), -25.2700, -57.5900),
    (false, "Compresor con fallas", Some(10.0), Some(-8.0), -25.2650, -57.5850),
    (true, "Revisión completa", Some(3.5), Some(-19.0), -25.2750, -57.5950),
    (true, "Operativo", Some(4.1), Some(-18.4), -25.2600, -57.5700),
    (false, "Falla eléctrica", None, None, -25.2850, -57.6000),
    (true, "Sistema normal", Some(3.8), Some(-19.2), -25.2955, -57.6020),
    (true, "Temperatura estable", Some(4.3), Some(-18.3), -25.2990, -57.6050),
    (false, "Pérdida de gas refrigerante", Some(12.0), Some(-5.0), -25.3010, -57.6070),
    (true, "Sin observaciones", Some(4.0), Some(-18.0), -25.3050, -57.6090),
];

const MARCAS: &[&str] = &[
    "Samsung", "LG", "Whirlpool", "Electrolux", "Panasonic", "Midea", "Bosch", "Daewoo", "GE",
    "Sharp",
];

const LOGOS: &[&str] = &["Sin logo", "Niko Cola", "Frutika"];

impl Store {
    /// Build a store populated with the reference dataset
    pub fn seeded() -> AppResult<Store> {
        let now = Utc::now();
        let mut tables = Tables::default();

        for (i, (nombre, email, telefono, direccion, activo)) in CLIENTES.iter().enumerate() {
            let id = i as i32 + 1;
            tables.clientes.insert(
                id,
                Cliente {
                    id,
                    nombre: nombre.to_string(),
                    email: email.to_string(),
                    telefono: telefono.to_string(),
                    direccion: direccion.to_string(),
                    ruc: None,
                    activo: *activo,
                    fecha_creacion: now,
                },
            );
        }

        for (i, nombre) in MARCAS.iter().enumerate() {
            let id = i as i32 + 1;
            tables.marcas.insert(
                id,
                Marca {
                    id,
                    nombre: nombre.to_string(),
                },
            );
        }

        for (i, nombre) in LOGOS.iter().enumerate() {
            let id = i as i32 + 1;
            tables.logos.insert(
                id,
                Logo {
                    id,
                    nombre: nombre.to_string(),
                },
            );
        }

        // One model row per seed unit; brands resolve by name
        for (i, (_, marca, modelo, _)) in EQUIPOS.iter().enumerate() {
            let id = i as i32 + 1;
            let marca_id = tables
                .marcas
                .values()
                .find(|m| m.nombre == *marca)
                .map(|m| m.id);
            tables.modelos.insert(
                id,
                Modelo {
                    id,
                    nombre: modelo.to_string(),
                    marca_id,
                },
            );
        }

        for (i, (cod_barras, marca, modelo, tipo_equipo)) in EQUIPOS.iter().enumerate() {
            let id = i as i32 + 1;
            let marca_id = tables
                .marcas
                .values()
                .find(|m| m.nombre == *marca)
                .map(|m| m.id);
            let modelo_id = tables
                .modelos
                .values()
                .find(|m| m.nombre == *modelo)
                .map(|m| m.id);
            tables.equipos.insert(
                id,
                Equipo {
                    id,
                    cod_barras: cod_barras.to_string(),
                    marca: marca.to_string(),
                    modelo: modelo.to_string(),
                    tipo_equipo: tipo_equipo.to_string(),
                    numero_serie: None,
                    marca_id,
                    modelo_id,
                    logo_id: None,
                    fecha_creacion: now,
                },
            );
        }

        for (i, (nombre, email, contrasena, rol)) in USUARIOS.iter().enumerate() {
            let id = i as i32 + 1;
            tables.usuarios.insert(
                id,
                Usuario {
                    id,
                    nombre: nombre.to_string(),
                    email: email.to_string(),
                    contrasena: hash_password(contrasena)?,
                    rol: *rol,
                    fecha_creacion: now,
                },
            );
        }

        // 1:1 seed assignments; ids 5 and 11 are already retired
        for id in 1..=EQUIPOS.len() as i32 {
            let activo = !ASIGNACIONES_RETIRADAS.contains(&id);
            tables.asignaciones.insert(
                id,
                Asignacion {
                    id,
                    equipo_id: id,
                    cliente_id: id,
                    usuario_id: Some(id),
                    fecha_asignacion: now,
                    fecha_retiro: if activo { None } else { Some(now) },
                    activo,
                    estado: if activo { "activa" } else { "retirada" }.to_string(),
                },
            );
        }

        for (i, (funcionando, estado_general, temp_actual, temp_freezer, lat, lon)) in
            ESTADOS.iter().enumerate()
        {
            let id = i as i32 + 1;
            tables.estados.insert(
                id,
                EstadoEquipo {
                    id,
                    asignacion_id: id,
                    equipo_id: id,
                    cliente_id: id,
                    usuario_id: id,
                    funcionando: *funcionando,
                    estado_general: estado_general.to_string(),
                    temperatura_actual: *temp_actual,
                    temperatura_freezer: *temp_freezer,
                    latitud: *lat,
                    longitud: *lon,
                    fecha_revision: now,
                    sincronizado: true,
                    estado_censo: EstadoCenso::Migrado,
                },
            );
        }

        tables.rebuild_indexes();
        Ok(Store {
            inner: std::sync::Arc::new(std::sync::RwLock::new(tables)),
        })
    }
}
