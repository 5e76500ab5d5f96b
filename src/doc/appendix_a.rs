/*!
# Token Table

| Byte | Hex | Keyword |
|---|---|---|
| 165 | A5 | `RND` |
| 166 | A6 | `INKEY$` |
| 167 | A7 | `PI` |
| 168 | A8 | `FN` |
| 169 | A9 | `POINT` |
| 170 | AA | `SCREEN$` |
| 171 | AB | `ATTR` |
| 172 | AC | `AT` |
| 173 | AD | `TAB` |
| 174 | AE | `VAL$` |
| 175 | AF | `CODE` |
| 176 | B0 | `VAL` |
| 177 | B1 | `LEN` |
| 178 | B2 | `SIN` |
| 179 | B3 | `COS` |
| 180 | B4 | `TAN` |
| 181 | B5 | `ASN` |
| 182 | B6 | `ACS` |
| 183 | B7 | `ATN` |
| 184 | B8 | `LN` |
| 185 | B9 | `EXP` |
| 186 | BA | `INT` |
| 187 | BB | `SQR` |
| 188 | BC | `SGN` |
| 189 | BD | `ABS` |
| 190 | BE | `PEEK` |
| 191 | BF | `IN` |
| 192 | C0 | `USR` |
| 193 | C1 | `STR$` |
| 194 | C2 | `CHR$` |
| 195 | C3 | `NOT` |
| 196 | C4 | `BIN` |
| 197 | C5 | `OR` |
| 198 | C6 | `AND` |
| 199 | C7 | `<=` |
| 200 | C8 | `>=` |
| 201 | C9 | `<>` |
| 202 | CA | `LINE` |
| 203 | CB | `THEN` |
| 204 | CC | `TO` |
| 205 | CD | `STEP` |
| 206 | CE | `DEF FN` |
| 207 | CF | `CAT` |
| 208 | D0 | `FORMAT` |
| 209 | D1 | `MOVE` |
| 210 | D2 | `ERASE` |
| 211 | D3 | `OPEN #` |
| 212 | D4 | `CLOSE #` |
| 213 | D5 | `MERGE` |
| 214 | D6 | `VERIFY` |
| 215 | D7 | `BEEP` |
| 216 | D8 | `CIRCLE` |
| 217 | D9 | `INK` |
| 218 | DA | `PAPER` |
| 219 | DB | `FLASH` |
| 220 | DC | `BRIGHT` |
| 221 | DD | `INVERSE` |
| 222 | DE | `OVER` |
| 223 | DF | `OUT` |
| 224 | E0 | `LPRINT` |
| 225 | E1 | `LLIST` |
| 226 | E2 | `STOP` |
| 227 | E3 | `READ` |
| 228 | E4 | `DATA` |
| 229 | E5 | `RESTORE` |
| 230 | E6 | `NEW` |
| 231 | E7 | `BORDER` |
| 232 | E8 | `CONTINUE` |
| 233 | E9 | `DIM` |
| 234 | EA | `REM` |
| 235 | EB | `FOR` |
| 236 | EC | `GO TO` |
| 237 | ED | `GO SUB` |
| 238 | EE | `INPUT` |
| 239 | EF | `LOAD` |
| 240 | F0 | `LIST` |
| 241 | F1 | `LET` |
| 242 | F2 | `PAUSE` |
| 243 | F3 | `NEXT` |
| 244 | F4 | `POKE` |
| 245 | F5 | `PRINT` |
| 246 | F6 | `PLOT` |
| 247 | F7 | `RUN` |
| 248 | F8 | `SAVE` |
| 249 | F9 | `RANDOMIZE` |
| 250 | FA | `IF` |
| 251 | FB | `CLS` |
| 252 | FC | `DRAW` |
| 253 | FD | `CLEAR` |
| 254 | FE | `RETURN` |
| 255 | FF | `COPY` |

Bytes below 165 are not tokens. 13 ends a line, 14 starts a hidden
number and 16 to 23 are control codes, see
[program format](../__Chapter_1/index.html).

*/
